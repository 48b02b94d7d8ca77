fn main() {
    black_box_age::run();
}
