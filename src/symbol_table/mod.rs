//! Variable and temporary registry.
//!
//! The symbol table records the static type of every declared variable and
//! hands out fresh temporaries (`t0`, `t1`, ...) for intermediate values.

pub mod symbol_table;
