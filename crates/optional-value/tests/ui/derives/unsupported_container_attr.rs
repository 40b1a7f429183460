use optional_value::ZeroValue;

#[derive(ZeroValue)]
#[zero_value(rename = "point")]
struct Point {
    x: i32,
}

fn main() {}
