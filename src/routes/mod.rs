pub mod candidate;
pub mod city;
pub mod file;
pub mod health;
pub mod user;
pub mod vacancy;
