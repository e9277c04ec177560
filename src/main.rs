use log::info;
use std::error::Error;

use squaremat::SquareMatrix;

fn print_section(title: &str) {
    println!("\n==================== {} ====================", title);
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    info!("squaremat {}", squaremat::VERSION);

    let mut a = SquareMatrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])?;
    let b = SquareMatrix::from_rows([[9.0, 8.0, 7.0], [6.0, 5.0, 4.0], [3.0, 2.0, 1.0]])?;

    print_section("Matrix A");
    print!("{}", a);

    print_section("Matrix B");
    print!("{}", b);

    print_section("Addition (A + B)");
    print!("{}", a.checked_add(&b)?);

    print_section("Subtraction (A - B)");
    print!("{}", a.checked_sub(&b)?);

    print_section("Unary Minus (-A)");
    print!("{}", -&a);

    print_section("Matrix Multiplication (A * B)");
    print!("{}", a.checked_mul(&b)?);

    print_section("Scalar Multiplication (2 * A)");
    print!("{}", 2.0 * &a);

    print_section("Scalar Multiplication (A * 2)");
    print!("{}", &a * 2.0);

    print_section("Scalar Division (A / 2)");
    print!("{}", a.checked_div_scalar(2.0)?);

    print_section("Elementwise Multiplication (A % B)");
    print!("{}", a.hadamard(&b)?);

    print_section("Modulo by Integer (A % 3)");
    print!("{}", a.checked_rem_int(3)?);

    print_section("Transpose");
    print!("{}", a.transpose());

    print_section("Power (A ^ 0) - Identity Matrix");
    print!("{}", a.power(0)?);

    print_section("Power (A ^ 2)");
    print!("{}", a.power(2)?);

    print_section("Pre-Increment (++A)");
    print!("{}", a.increment());

    print_section("Post-Increment (A++)");
    print!("{}", a.post_increment());
    print!("After A++:\n{}", a);

    print_section("Pre-Decrement (--A)");
    print!("{}", a.decrement());

    print_section("Post-Decrement (A--)");
    print!("{}", a.post_decrement());
    print!("After A--:\n{}", a);

    print_section("Determinant (!A)");
    println!("!A = {}", a.determinant()?);

    let mut c = a.clone();

    print_section("Compound Assignments");
    println!("(C is a copy of A used for compound assignments)\n");

    c.try_add_assign(&b)?;
    println!("C += B:\n{}", c);

    c.try_sub_assign(&b)?;
    println!("C -= B:\n{}", c);

    c.try_mul_assign(&b)?;
    println!("C *= B:\n{}", c);

    c.scale_assign(0.5);
    println!("C *= 0.5:\n{}", c);

    c.try_div_assign(0.5)?;
    println!("C /= 0.5:\n{}", c);

    c.try_hadamard_assign(&b)?;
    println!("C %= B:\n{}", c);

    c.try_rem_assign(7)?;
    println!("C %= 7:\n{}", c);

    // ordering is by element sum only
    print_section("Comparisons");
    println!("A == A? {}", a == a.clone());
    println!("A != B? {}", a != b);
    println!("A < B?  {}", a < b);
    println!("A <= B? {}", a <= b);
    println!("B > A?  {}", b > a);
    println!("B >= A? {}", b >= a);

    print_section("Element Access");
    println!("A[0][0] = {}", a.row(0)?[0]);
    println!("A[1][1] = {}", a.row(1)?[1]);
    println!("A[2][2] = {}", a.row(2)?[2]);

    println!("\nSetting A[0][1] = 42");
    a.row_mut(0)?[1] = 42.0;
    print!("Updated A:\n{}", a);

    println!("\nSetting A[2][0] = -7");
    a.row_mut(2)?[0] = -7.0;
    print!("Updated A:\n{}", a);

    print_section("Print to stdout");
    a.write_to(std::io::stdout().lock())?;

    Ok(())
}
