extern crate curve_interp;

use curve_interp::easing;

fn main() {
    let ease = easing::expo_up_down(2.0, 3.0, 1.0, 2.0);

    let number_of_steps = 20;

    println!("t;linear;expo_up_down;bounce");
    for i in 0..=number_of_steps {
        let t = i as f64 / number_of_steps as f64;
        println!(
            "{:.2};{:.2};{:.2};{:.0}",
            t,
            easing::linear(t),
            ease(t),
            easing::bounce(t)
        );
    }
}
