use sovran_any::AnyValue;
use std::f64::consts::PI;

#[derive(Debug, Clone)]
struct Circle {
    radius: f64,
}

#[derive(Debug, Clone)]
struct Rect {
    width: f64,
    height: f64,
}

fn area(shape: &AnyValue) -> Option<f64> {
    if let Some(circle) = shape.cast_to::<Circle>() {
        return Some(PI * circle.radius * circle.radius);
    }
    if let Some(rect) = shape.cast_to::<Rect>() {
        return Some(rect.width * rect.height);
    }
    None
}

fn main() {
    let mut shapes = vec![
        AnyValue::from_value(Circle { radius: 1.0 }),
        AnyValue::from_value(Rect {
            width: 2.0,
            height: 3.0,
        }),
        AnyValue::from_value("not a shape"),
        AnyValue::new(),
    ];

    for shape in &shapes {
        match area(shape) {
            Some(a) => println!("{:?} has area {:.2}", shape, a),
            None => println!("{:?} has no area", shape),
        }
    }

    // Grow every circle in place
    for shape in &mut shapes {
        if let Some(circle) = shape.cast_to_mut::<Circle>() {
            circle.radius *= 2.0;
        }
    }

    // Turn the odd one out into a square
    shapes[2].set(Rect {
        width: 1.5,
        height: 1.5,
    });

    let total: f64 = shapes.iter().filter_map(area).sum();
    println!("Total area: {:.2}", total);
}
