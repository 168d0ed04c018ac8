#![allow(dead_code)]

pub mod austria;
