use copyctor::CopyConstructor;

#[derive(CopyConstructor)]
pub struct Gauge {
    #[copy_constructor(depth = "Reference")]
    pub level: u8,
}

fn main() {}
