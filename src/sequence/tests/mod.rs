mod allocation;
mod get;
mod remove;
