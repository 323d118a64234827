fn main() {
    f4_rt_build::init().unwrap();
}
