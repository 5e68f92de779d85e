//! MindSpace library
//!
//! Local persistence, session and validation core for the MindSpace student
//! wellbeing app. A view layer calls into [`commands`]; everything is stored
//! through a [`storage::RecordStore`].

pub mod app;
pub mod commands;
pub mod config;
pub mod crypto;
pub mod database;
pub mod error;
pub mod services;
pub mod storage;
pub mod validation;
