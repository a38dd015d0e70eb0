mod options;
mod plan;
