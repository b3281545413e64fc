//! Shared test fixtures: a tiny HTTP/1.1 server and an in-memory job service.

#![allow(dead_code)]

pub mod fake_service;
pub mod http_server;
