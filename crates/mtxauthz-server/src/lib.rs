#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod authz;
pub mod extract;
pub mod handler;
pub mod middleware;
pub mod mtx;
pub mod service;

pub use crate::handler::{Error, ErrorKind, Result};
