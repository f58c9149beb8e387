mod concurrency;
mod custom_invoker;
mod generic;
mod unbox;

fn main() {}
