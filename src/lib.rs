#![allow(clippy::doc_markdown)]

pub mod billing;
pub mod history;
pub mod prelude;
pub mod quantity;
pub mod report;
pub mod tables;
