//! Shared components. `pico` holds the generic Pico.css building blocks.
pub mod new_chat_dialog;
pub mod pico;
