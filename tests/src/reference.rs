mod display;
mod listing;
mod search;
