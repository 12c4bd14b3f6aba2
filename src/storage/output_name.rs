use crate::core::config::render_config::RenderConfig;

/// Deterministic file name for a rendered image.
///
/// Mandelbrot images are named after hue and scale only,
/// `[job_<N>_]inithue_scale_<hue>_<scale>.<ext>`. The other recurrences also
/// record their parameter as `a_<re>_b_<im>_` before the hue. Numbers use
/// their shortest round-trip form, so `10.0` becomes `10`.
#[must_use]
pub fn output_file_name(config: &RenderConfig, job: Option<u32>, extension: &str) -> String {
    let mut name = String::new();

    if let Some(job) = job {
        name.push_str(&format!("job_{job}_"));
    }

    if config.recurrence.uses_parameter() {
        name.push_str(&format!("a_{}_b_{}_", config.c.real, config.c.imag));
    }

    name.push_str(&format!(
        "inithue_scale_{}_{}.{}",
        config.hue, config.colour_scale, extension
    ));

    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::recurrence::Recurrence;

    #[test]
    fn test_mandelbrot_name() {
        let config = RenderConfig::default();

        assert_eq!(
            output_file_name(&config, None, "png"),
            "inithue_scale_0.5_10.png"
        );
    }

    #[test]
    fn test_mandelbrot_name_with_job() {
        let config = RenderConfig {
            colour_scale: 20.0,
            ..RenderConfig::default()
        };

        assert_eq!(
            output_file_name(&config, Some(13), "png"),
            "job_13_inithue_scale_0.5_20.png"
        );
    }

    #[test]
    fn test_julia_name_records_parameter() {
        let config = RenderConfig {
            recurrence: Recurrence::Julia,
            c: Complex::new(-0.834, -0.171),
            hue: 0.25,
            colour_scale: 2.5,
            ..RenderConfig::default()
        };

        assert_eq!(
            output_file_name(&config, Some(1), "ppm"),
            "job_1_a_-0.834_b_-0.171_inithue_scale_0.25_2.5.ppm"
        );
    }

    #[test]
    fn test_exotic_name_without_job() {
        let config = RenderConfig {
            recurrence: Recurrence::Exotic,
            c: Complex::new(0.0, 1.0),
            ..RenderConfig::default()
        };

        assert_eq!(
            output_file_name(&config, None, "png"),
            "a_0_b_1_inithue_scale_0.5_10.png"
        );
    }
}
