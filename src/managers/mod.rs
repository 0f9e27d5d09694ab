// DarkMin state managers
// Managers hold in-memory state mutated by the shell.

pub mod tab_manager;
