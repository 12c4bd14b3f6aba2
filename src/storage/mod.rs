pub(crate) mod atomic_file;
pub mod gif_sequence;
pub mod job_file;
pub mod natural_sort;
pub mod output_name;
