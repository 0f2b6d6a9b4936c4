mod common;
mod transitions;
mod views;
