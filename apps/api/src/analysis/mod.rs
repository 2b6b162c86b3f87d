// Analysis core: tokenizer, JD-R keyword matcher, frequency counter.
// Pure functions of (subset, taxonomy); the report builder and handlers wrap them.

pub mod frequency;
pub mod handlers;
pub mod keywords;
pub mod report;
pub mod tokenizer;
