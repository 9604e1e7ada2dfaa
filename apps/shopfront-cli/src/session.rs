//! # Console Session
//!
//! The interactive menu loop. Generic over its input and output so tests can
//! drive it with in-memory buffers.
//!
//! ## Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  print menu ──► "Enter choice: " ──► read line                          │
//! │       ▲                                  │                              │
//! │       │           ┌──────────────────────┼────────────────────┐         │
//! │       │           ▼                      ▼                    ▼         │
//! │       │      1-4: store op          5: goodbye          end of input    │
//! │       │           │                      │                    │         │
//! │       └───────────┘                      ▼                    ▼         │
//! │                                        stop                 stop        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use shopfront_core::{CoreError, StoreService};
use tracing::debug;

use crate::config::ShopConfig;
use crate::error::CliResult;
use crate::menu::{parse_number, MenuChoice, MENU};

/// One shopper at the console.
pub struct Session<'a, R, W> {
    store: &'a mut StoreService,
    config: &'a ShopConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut StoreService, config: &'a ShopConfig, input: R, output: W) -> Self {
        Session {
            store,
            config,
            input,
            output,
        }
    }

    /// Runs until the shopper picks Exit or input ends.
    pub fn run(&mut self) -> CliResult<()> {
        writeln!(self.output, "Welcome to {}!", self.config.store_name)?;

        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt_number("Enter choice: ")? else {
                break;
            };

            let flow = match MenuChoice::from_number(choice) {
                Some(MenuChoice::ViewProducts) => self.view_products()?,
                Some(MenuChoice::BuyProduct) => self.buy_product()?,
                Some(MenuChoice::ViewCart) => self.view_cart()?,
                Some(MenuChoice::Checkout) => self.checkout()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting... Thank you for shopping!")?;
                    ControlFlow::Break(())
                }
                None => {
                    writeln!(self.output, "Invalid choice! Try again.")?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Prompts until a whole number is entered. `None` means input ended.
    fn prompt_number(&mut self, prompt: &str) -> CliResult<Option<i64>> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                return Ok(None);
            }

            match parse_number(&line) {
                Some(n) => return Ok(Some(n)),
                None => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    fn view_products(&mut self) -> CliResult<ControlFlow<()>> {
        writeln!(self.output, "\nAvailable Products:")?;
        for product in self.store.products() {
            writeln!(
                self.output,
                "{}. {} - {} (Stock: {})",
                product.id(),
                product.name(),
                self.config.format_money(product.unit_price()),
                product.stock()
            )?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn buy_product(&mut self) -> CliResult<ControlFlow<()>> {
        let Some(product_id) = self.prompt_number("Enter Product ID: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(quantity) = self.prompt_number("Enter Quantity: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        match self.store.buy_product(product_id, quantity) {
            Ok(purchase) => writeln!(self.output, "{}", purchase)?,
            Err(err) => writeln!(
                self.output,
                "Product unavailable or insufficient stock. ({})",
                err
            )?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn view_cart(&mut self) -> CliResult<ControlFlow<()>> {
        match self.store.view_cart() {
            Ok(entries) => {
                writeln!(self.output, "\nItems in Cart:")?;
                for item in entries {
                    writeln!(self.output, "{} - Quantity: {}", item.name, item.quantity)?;
                }
            }
            Err(CoreError::EmptyCart) => writeln!(self.output, "Cart is empty.")?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn checkout(&mut self) -> CliResult<ControlFlow<()>> {
        match self.store.checkout() {
            Ok(receipt) => {
                writeln!(self.output, "\nCheckout Summary:")?;
                for line in &receipt.lines {
                    writeln!(
                        self.output,
                        "{} - {} x {} = {}",
                        line.name,
                        line.quantity,
                        self.config.format_money(line.unit_price),
                        self.config.format_money(line.line_cost)
                    )?;
                }
                writeln!(
                    self.output,
                    "Items: {} ({} units)",
                    receipt.item_count, receipt.total_quantity
                )?;
                writeln!(self.output, "Total: {}", self.config.format_money(receipt.total))?;
                writeln!(self.output, "Receipt: {}", receipt.id)?;
                writeln!(self.output, "Purchase successful!")?;
            }
            Err(CoreError::EmptyCart) => {
                writeln!(self.output, "Cart is empty. Add products before checkout.")?
            }
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(ControlFlow::Continue(()))
    }
}
