pub mod candidate;
pub mod city;
pub mod file;
pub mod user;
pub mod vacancy;
