use optional_value::ZeroValue;

#[derive(ZeroValue)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}
