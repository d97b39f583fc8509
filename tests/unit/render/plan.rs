use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 32,
        height: 16,
    }
}

#[test]
fn faded_polyline_records_one_line_per_segment() {
    let mut plan = FramePlan::new(canvas(), Rgba8::TRANSPARENT);
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 0.0),
    ];
    let stroke = StrokeStyle {
        color: Rgba8::WHITE,
        width: 2.0,
    };
    plan.stroke_faded_polyline(&pts, &stroke, &|i| i as f32 / 3.0);
    assert_eq!(plan.ops.len(), 3);
    let alphas: Vec<u8> = plan
        .ops
        .iter()
        .map(|op| match op {
            DrawOp::Line { stroke, .. } => stroke.color.a,
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(alphas, vec![85, 170, 255]);
}

#[test]
fn degenerate_polygons_are_dropped() {
    let mut plan = FramePlan::new(canvas(), Rgba8::TRANSPARENT);
    let g = LinearGradient {
        start: Point::ZERO,
        end: Point::new(1.0, 0.0),
        stops: [
            GradientStop {
                offset: 0.0,
                color: Rgba8::WHITE,
            },
            GradientStop {
                offset: 0.5,
                color: Rgba8::TRANSPARENT,
            },
            GradientStop {
                offset: 1.0,
                color: Rgba8::TRANSPARENT,
            },
        ],
    };
    plan.fill_gradient_polygon(&[Point::ZERO, Point::new(1.0, 1.0)], &g);
    assert!(plan.ops.is_empty());
}

#[test]
fn status_message_is_discoverable() {
    let mut plan = FramePlan::new(canvas(), Rgba8::TRANSPARENT);
    assert_eq!(plan.status_message(), None);
    plan.status("Loading");
    assert_eq!(plan.status_message(), Some("Loading"));
}
