use optional_value::ZeroValue;

#[derive(ZeroValue)]
enum Mode {
    #[zero_value(zero)]
    Off,
    #[zero_value(zero)]
    Idle,
}

fn main() {}
