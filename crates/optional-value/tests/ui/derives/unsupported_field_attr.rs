use optional_value::ZeroValue;

#[derive(ZeroValue)]
struct Point {
    #[zero_value(skp)]
    x: i32,
    y: i32,
}

fn main() {}
