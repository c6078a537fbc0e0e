use bookplate::{Author, Book, BookError};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let author = Author::new(
        Some("J. D. Salinger".to_string()),
        Some("1919".to_string()),
        Some("Male".to_string()),
    );
    let book = Book::new(
        "The Catcher in the Rye".to_string(),
        Some("1951".to_string()),
        Some("Little, Brown and Company".to_string()),
        author,
    );

    println!("{}", book);
    println!("author: {}", book.author_name());
    println!("born: {}", book.year_of_birth());
    println!("male author: {}", book.has_male_author()?);
    println!(
        "published last century: {}",
        book.was_published_last_century()?
    );

    let mut draft = Book::with_title("Untitled Work".to_string());
    println!();
    println!("{}", draft);
    println!("author: {:?}", draft.author_name());
    match draft.was_published_last_century() {
        Ok(last_century) => println!("published last century: {}", last_century),
        Err(BookError::YearNotNumeric(_)) => println!("published last century: year not set"),
        Err(err) => return Err(err.into()),
    }

    draft.set_author_name(Some("Harper Lee".to_string()));
    draft.set_year_of_birth(Some("1926".to_string()));
    draft.set_title("To Kill a Mockingbird".to_string());
    draft.set_year_published(Some("1960".to_string()));
    draft.set_publisher(Some("J. B. Lippincott & Co.".to_string()));
    println!();
    println!("{}", draft);
    println!(
        "published last century: {}",
        draft.was_published_last_century()?
    );

    Ok(())
}
