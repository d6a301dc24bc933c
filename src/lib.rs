//! Glow Advisor - Conversational Product Assistant
//!
//! This crate implements a chat backend for a cosmetics catalog: one
//! utterance in, one reply out, produced by a deterministic cascade of
//! answer sources (product catalog, FAQ table, LLM fallback).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
