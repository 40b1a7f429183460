use optional_value::ZeroValue;

#[derive(ZeroValue)]
enum Mode {
    #[zero_value(default)]
    Off,
    On,
}

fn main() {}
