//! Static syllable inventories.
//!
//! Both tables are process-wide constants. [`Transliterator`](crate::Transliterator)
//! compiles them into automata once and never mutates them.
pub mod kana;
