pub(crate) mod ciura;
pub(crate) mod fibonacci;
pub(crate) mod half;
pub(crate) mod hibbard;
pub(crate) mod pratt;
pub(crate) mod sedgewick;
