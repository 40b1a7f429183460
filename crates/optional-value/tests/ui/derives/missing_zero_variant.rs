use optional_value::ZeroValue;

#[derive(ZeroValue)]
enum Mode {
    Off,
    On,
}

fn main() {}
