//! Finds which words of a dictionary can be traced as chains of adjacent cells
//! in a fixed 3D letter grid, never visiting a cell twice within one word.

pub mod coord;
pub mod cubes;
pub mod grid;
pub mod search;
pub mod solver;
