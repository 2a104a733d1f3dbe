mod catalog;
mod enumeration;
mod field;
