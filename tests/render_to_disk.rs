use escape_time::{
    Colour, ColouringMode, Complex, PixelRect, PixelToComplexCoordsError, PngFilePresenter,
    PpmFilePresenter, Point, Recurrence, RenderConfig, RenderController, RenderJob, View,
    Viewport, ZoomSequence, assemble_gif, load_jobs, pixel_to_complex_coords, render, run_batch,
    run_zoom,
};
use std::time::Duration;

fn small(recurrence: Recurrence) -> RenderConfig {
    RenderConfig {
        recurrence,
        width: 64,
        height: 36,
        max_iterations: 50,
        ..RenderConfig::default()
    }
}

#[test]
fn mandelbrot_png_is_written_and_decodes() {
    let dir = tempfile::tempdir().unwrap();
    let job = RenderJob {
        config: small(Recurrence::Mandelbrot),
        ..RenderJob::default()
    };
    let mut controller = RenderController::new(PngFilePresenter::new());

    let path = controller.run_job(&job, Some(dir.path())).unwrap().unwrap();

    assert_eq!(path, dir.path().join("inithue_scale_0.5_10.png"));
    let image = image::open(&path).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (64, 36));
    assert_eq!(image.get_pixel(32, 18).0, [0, 0, 0]);
    assert_ne!(image.get_pixel(0, 0).0, [0, 0, 0]);

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names.len(), 1, "temporary files left behind: {names:?}");
}

#[test]
fn halving_the_viewport_matches_doubling_the_zoom() {
    let aspect = 16.0 / 9.0;
    let base = View::default().viewport(aspect).unwrap();
    let zoomed = View::default().with_zoom(2.0).viewport(aspect).unwrap();

    assert!((zoomed.width() - base.width() / 2.0).abs() < 1e-12);
    assert!((zoomed.height() - base.height() / 2.0).abs() < 1e-12);
}

#[test]
fn exotic_render_marks_the_singular_centre() {
    let config = RenderConfig {
        width: 64,
        height: 64,
        aspect_ratio: 1.0,
        ..small(Recurrence::Exotic)
    };
    let viewport = View::default().viewport(1.0).unwrap();

    let buffer = render(&config, viewport).unwrap();

    assert_eq!(buffer.pixel(Point { x: 32, y: 32 }), Some(Colour::WHITE));
}

#[test]
fn julia_flat_and_trajectory_share_the_same_set() {
    let trajectory = RenderConfig {
        c: Complex::new(-0.8, 0.156),
        ..small(Recurrence::Julia)
    };
    let flat = RenderConfig {
        colouring: Some(ColouringMode::Flat),
        ..trajectory
    };
    let viewport = View::default().viewport(trajectory.aspect_ratio).unwrap();

    let a = render(&trajectory, viewport).unwrap();
    let b = render(&flat, viewport).unwrap();

    for (x, y) in a.buffer().chunks_exact(3).zip(b.buffer().chunks_exact(3)) {
        assert_eq!(x == [0, 0, 0], y == [0, 0, 0]);
    }
}

#[test]
fn batch_file_renders_every_job() {
    let dir = tempfile::tempdir().unwrap();
    let jobs_path = dir.path().join("jobs.json");
    std::fs::write(
        &jobs_path,
        r#"[
            {"job": 1, "width": 32, "height": 18, "max_iterations": 30},
            {"job": 2, "recurrence": "julia", "width": 32, "height": 18, "max_iterations": 30,
             "c": {"real": 0.285, "imag": 0.01}, "zoom": 1.5}
        ]"#,
    )
    .unwrap();
    let out = dir.path().join("out");

    let jobs = load_jobs(&jobs_path).unwrap();
    let report = run_batch(&jobs, PpmFilePresenter::new(), Some(&out));

    assert!(report.is_success());
    assert!(out.join("job_1_inithue_scale_0.5_10.ppm").is_file());
    assert!(out.join("job_2_a_0.285_b_0.01_inithue_scale_0.5_10.ppm").is_file());
}

#[test]
fn zoom_frames_reassemble_into_a_gif() {
    let dir = tempfile::tempdir().unwrap();
    let frames_dir = dir.path().join("frames");
    let config = RenderConfig {
        width: 32,
        height: 18,
        max_iterations: 30,
        ..RenderConfig::default()
    };
    let view = View {
        center: Complex::new(-0.75, 0.1),
        ..View::default()
    };
    let sequence = ZoomSequence::new(1.0, 10.0, 4).unwrap();

    let report = run_zoom(
        &config,
        &view,
        &sequence,
        PngFilePresenter::new(),
        &frames_dir,
        None,
    )
    .unwrap();
    assert_eq!(report.frames.len(), 4);
    assert_eq!(report.gif, None);

    let gif = assemble_gif(&frames_dir, ".png", Duration::from_millis(40)).unwrap();

    assert_eq!(gif, dir.path().join("frames.gif"));
    assert!(std::fs::metadata(&gif).unwrap().len() > 0);
}

#[test]
fn plane_mapper_is_usable_from_outside_the_crate() {
    let pixel_rect = PixelRect::from_size(4, 2).unwrap();
    let viewport = Viewport::new(-2.0, 2.0, -1.0, 1.0).unwrap();

    let corner = pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, viewport).unwrap();
    let middle = pixel_to_complex_coords(Point { x: 2, y: 1 }, pixel_rect, viewport).unwrap();
    let outside = pixel_to_complex_coords(Point { x: 4, y: 0 }, pixel_rect, viewport);

    assert_eq!(corner, Complex::new(-2.0, -1.0));
    assert_eq!(middle, Complex::new(0.0, 0.0));
    assert!(matches!(
        outside,
        Err(PixelToComplexCoordsError::PointOutsideRect { .. })
    ));
}
