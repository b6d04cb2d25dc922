#![allow(dead_code)]

pub mod model_helpers;
pub mod source_fixtures;
