// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for the meme editor.

pub mod caption;
pub mod dimensions;
pub mod ui_state;
pub mod voice;
pub mod volume;
