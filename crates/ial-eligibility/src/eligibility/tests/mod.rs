mod common;
mod dual;
