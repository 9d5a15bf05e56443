pub mod post_repository;

#[cfg(test)]
pub mod in_memory_repository;
