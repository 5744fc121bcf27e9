//! Product actions - add or update, show one by id, page through all.

use crate::{
    cli::{Console, Session},
    core::{
        money,
        product::{self, ProductDraft, SaveOutcome},
    },
    entities::product::Model,
    errors::Result,
};
use sea_orm::PaginatorTrait;
use std::io::{BufRead, Write};
use tracing::info;

/// What the operator chose after seeing a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Paging {
    Next,
    Menu,
}

/// Prompts for name, quantity and price, then creates the product or
/// overwrites the one that already has this name.
///
/// Each field is asked for again until it validates. The date is today.
///
/// # Errors
/// Propagates store failures and [`crate::errors::Error::InputClosed`].
pub async fn add_product<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let console = &mut session.console;

    let name = console.prompt_valid(
        "What's this product called? ",
        "That's not a valid name",
        product::parse_name,
    )?;
    let quantity = console.prompt_valid(
        &format!("How many {name} are there? "),
        "That's not a valid amount!",
        product::parse_quantity,
    )?;
    let price = console.prompt_valid(
        &format!("How much does each {name} cost? $"),
        "Sorry that's not a valid price!",
        money::parse_dollars,
    )?;

    let today = chrono::Local::now().date_naive();
    let draft = ProductDraft::new(&name, quantity, price, today)?;

    let outcome = product::save_product(session.db, &draft).await?;
    session.console.clear()?;
    match outcome {
        SaveOutcome::Created(model) => {
            info!("Added product '{}' as id {}", model.name, model.id);
            session
                .console
                .say(format!("{} has been successfully added to inventory!", model.name))
        }
        SaveOutcome::Updated(model) => {
            info!("Updated product '{}' (id {})", model.name, model.id);
            session
                .console
                .say(format!("{} has been updated!", model.name))
        }
    }
}

/// Asks for one id and shows that product.
///
/// Bad input and unknown ids both print a retry message and return to the menu.
///
/// # Errors
/// Propagates store failures and [`crate::errors::Error::InputClosed`].
pub async fn show_product<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let answer = session
        .console
        .prompt("Please enter a valid product ID number: ")?;

    let found = match answer.trim().parse::<i64>() {
        Ok(id) => product::get_product_by_id(session.db, id).await?,
        Err(_) => None,
    };

    match found {
        Some(model) => show_record(&mut session.console, &model).map(|_| ()),
        None => session.console.say("Please try again!"),
    }
}

/// Pages through every product in id order, one record per screen.
///
/// # Errors
/// Propagates store failures and [`crate::errors::Error::InputClosed`].
pub async fn view_products<R: BufRead, W: Write>(session: &mut Session<'_, R, W>) -> Result<()> {
    let mut pages = product::products_ordered_by_id().paginate(session.db, 1);
    let mut shown = 0_usize;

    while let Some(page) = pages.fetch_and_next().await? {
        for model in &page {
            shown += 1;
            if show_record(&mut session.console, model)? == Paging::Menu {
                return Ok(());
            }
        }
    }

    if shown == 0 {
        session.console.say("There are no products in the inventory yet.")?;
    }
    Ok(())
}

/// Prints one record and asks whether to continue.
///
/// `n` clears the screen before the next record, `m` returns to the menu and
/// anything else moves on without clearing.
fn show_record<R: BufRead, W: Write>(console: &mut Console<R, W>, model: &Model) -> Result<Paging> {
    console.say(format!("\n  ID Number: {}", model.id))?;
    console.say(format!(" Product Name: {}", model.name))?;
    console.say(format!(" Product Quantity: {}", model.quantity))?;
    console.say(format!(" Product Price: {}", money::format_cents(model.price)))?;
    console.say(format!(" Last Updated: {}\n\n", model.date_updated))?;
    console.say(" Press n for next entry or m to get to the menu")?;

    let action = console.prompt("What would you like to do? ")?;
    match action.trim().to_lowercase().as_str() {
        "m" => Ok(Paging::Menu),
        "n" => {
            console.clear()?;
            Ok(Paging::Next)
        }
        _ => Ok(Paging::Next),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{config::AppConfig, errors::Error, test_utils::*};
    use sea_orm::DatabaseConnection;
    use std::io::Cursor;

    type TestSession<'db> = Session<'db, Cursor<Vec<u8>>, Vec<u8>>;

    fn session<'db>(db: &'db DatabaseConnection, input: &str) -> TestSession<'db> {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
        let config = AppConfig {
            clear_screen: false,
            ..AppConfig::default()
        };
        Session::new(db, console, &config)
    }

    fn output(session: TestSession<'_>) -> String {
        String::from_utf8(session.console.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_add_product_reprompts_invalid_fields() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = session(&db, "\n  \nWidget\n-1\nten\n3\nfree\n19.99\n");

        add_product(&mut session).await?;

        let text = output(session);
        assert_eq!(text.matches("That's not a valid name").count(), 2);
        assert_eq!(text.matches("That's not a valid amount!").count(), 2);
        assert_eq!(text.matches("Sorry that's not a valid price!").count(), 1);
        assert!(text.contains("Widget has been successfully added to inventory!"));

        let products = product::list_products(&db).await?;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[0].quantity, 3);
        assert_eq!(products[0].price, 1999);
        assert_eq!(products[0].date_updated, chrono::Local::now().date_naive());
        Ok(())
    }

    #[tokio::test]
    async fn test_add_existing_name_updates_in_place() -> Result<()> {
        let db = setup_test_db().await?;
        let existing = create_test_product(&db, "Widget").await?;
        let mut session = session(&db, "Widget\n7\n0.05\n");

        add_product(&mut session).await?;

        assert!(output(session).contains("Widget has been updated!"));
        let products = product::list_products(&db).await?;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, existing.id);
        assert_eq!(products[0].quantity, 7);
        assert_eq!(products[0].price, 5);
        Ok(())
    }

    #[tokio::test]
    async fn test_add_product_input_closed() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = session(&db, "Widget\n");

        let result = add_product(&mut session).await;
        assert!(matches!(result, Err(Error::InputClosed)));
        assert!(product::list_products(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_show_product_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_product(&db, "First").await?;
        let second = create_test_product(&db, "Second").await?;
        let mut session = session(&db, &format!("{}\nm\n", second.id));

        show_product(&mut session).await?;

        let text = output(session);
        assert!(text.contains(&format!("ID Number: {}", second.id)));
        assert!(text.contains("Product Name: Second"));
        assert!(text.contains("Product Price: $1.99"));
        assert!(text.contains("Last Updated: 2024-01-31"));
        assert!(!text.contains("First"));
        Ok(())
    }

    #[tokio::test]
    async fn test_show_product_bad_input_returns_to_menu() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_product(&db, "First").await?;

        // Non-numeric input is not asked again
        let mut bad = session(&db, "abc\n1\n");
        show_product(&mut bad).await?;
        let text = output(bad);
        assert_eq!(text.matches("Please try again!").count(), 1);
        assert_eq!(text.matches("Please enter a valid product ID number: ").count(), 1);

        // Unknown id gets the same message
        let mut unknown = session(&db, "999\n");
        show_product(&mut unknown).await?;
        assert!(output(unknown).contains("Please try again!"));
        Ok(())
    }

    #[tokio::test]
    async fn test_view_products_pages_in_id_order() -> Result<()> {
        let db = setup_test_db().await?;
        for name in ["One", "Two", "Three"] {
            create_test_product(&db, name).await?;
        }
        let mut session = session(&db, "n\nx\nn\n");

        view_products(&mut session).await?;

        let text = output(session);
        let one = text.find("Product Name: One").unwrap();
        let two = text.find("Product Name: Two").unwrap();
        let three = text.find("Product Name: Three").unwrap();
        assert!(one < two && two < three);
        assert_eq!(text.matches("What would you like to do? ").count(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_view_products_m_returns_early() -> Result<()> {
        let db = setup_test_db().await?;
        for name in ["One", "Two", "Three"] {
            create_test_product(&db, name).await?;
        }
        let mut session = session(&db, "n\nm\n");

        view_products(&mut session).await?;

        let text = output(session);
        assert!(text.contains("Product Name: Two"));
        assert!(!text.contains("Product Name: Three"));
        Ok(())
    }

    #[tokio::test]
    async fn test_view_products_empty_store() -> Result<()> {
        let db = setup_test_db().await?;
        let mut session = session(&db, "");

        view_products(&mut session).await?;

        assert!(output(session).contains("There are no products in the inventory yet."));
        Ok(())
    }
}
