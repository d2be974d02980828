//! # Sermon State Module
//!
//! This module provides the domain types shared across the sermon-forge
//! workspace (content kinds, generation options, result maps) and the two
//! observable state containers a UI layer renders from: the transcript
//! state and the generation-batch state.
//!
//! The module is deliberately I/O-free; sessions in `sermon_forge` own
//! instances of these containers and drive their transitions.

mod domain;
mod state;

pub use domain::{
    ContentKind, ContentResults, GenerationOptions, SermonPrepOptions, SundayContentOptions,
};
pub use state::{GenerationState, TranscriptState};
