pub mod generate_fractal_parallel_rayon;
#[cfg(test)]
pub mod generate_fractal_serial;
pub mod ports;
