mod handler;
mod pages;
