extern crate curve_interp;

use curve_interp::{CubicSplineCurve, Curve, Point2};

fn main() {
    let x_min = 0.0;
    let x_max = 6.0;

    let curve = CubicSplineCurve::new(vec![
        Point2::new(x_min, 1.0),
        Point2::new(1.0, -1.0),
        Point2::new(2.0, 0.0),
        Point2::new(4.0, 3.0),
        Point2::new(5.0, 1.0),
        Point2::new(x_max, 1.0),
    ])
    .unwrap();

    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, curve.get_y(x).unwrap());
    }
}
