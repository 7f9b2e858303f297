//! # mapdown
//!
//! A bidirectional converter between hierarchical node maps and structured
//! text documents.
//!
//! The same document can be edited as a node diagram and as structured text
//! (ATX headings, bulleted/numbered list items with optional checkboxes, and
//! pipe tables). This crate is the engine that keeps the two views
//! consistent: it parses structured text into a forest of nodes, serializes
//! a forest back into text, and reconciles a freshly parsed forest against a
//! previously materialized one so that node identity and cosmetic layout
//! survive external edits of the underlying text.
//!
//! The canvas renderer, text widget, persistence adapters and the automatic
//! layout pass are external collaborators: they supply raw text, hold the
//! forest, and consume the coordinates this crate passes through untouched.

pub mod mapdown;
