use copyctor::CopyConstructor;

#[derive(CopyConstructor)]
enum Color {
    Red,
    Green,
}

fn main() {}
