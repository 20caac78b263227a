//! Invoice
//!
//! Turns a priced [`Cart`] into an ordered list of [`InvoiceRow`]s, then lays those rows out
//! as a fixed width ASCII table:
//!
//! ```text
//! +------------------------------------------------+----------+
//! | Name                                       qty |    price |
//! +------------------------------------------------+----------+
//! | Green Tea                                    3 |     2.37 |
//! |   (buy 2, get 1 free)                          |    -0.79 |
//! +------------------------------------------------+----------+
//! | TOTAL                                          |     1.58 |
//! +------------------------------------------------+----------+
//! ```

use std::io;

use rust_decimal::Decimal;
use smallvec::{SmallVec, smallvec};
use thiserror::Error;

use crate::{cart::Cart, discounts::format_amount};

/// Printed when a promotion has no description.
pub const UNKNOWN_PROMOTION: &str = "unknown promotion";

/// Printed when a coupon has no description.
pub const UNKNOWN_COUPON: &str = "unknown coupon";

/// Product name column, left aligned.
pub const NAME_COLUMN: Column = Column::left(40);

/// Quantity column, right aligned.
pub const QUANTITY_COLUMN: Column = Column::right(4);

/// Price column, right aligned.
pub const PRICE_COLUMN: Column = Column::right(8);

/// Horizontal rule spanning the name, quantity and price columns.
pub const SEPARATOR: &str = "+------------------------------------------------+----------+";

/// Errors that can occur when writing an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// IO error
    #[error("Failed to write invoice: {0}")]
    IO(#[from] io::Error),
}

/// A fixed width text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    width: usize,
    right_aligned: bool,
}

impl Column {
    /// A left aligned column of `width` characters.
    pub const fn left(width: usize) -> Self {
        Self {
            width,
            right_aligned: false,
        }
    }

    /// A right aligned column of `width` characters.
    pub const fn right(width: usize) -> Self {
        Self {
            width,
            right_aligned: true,
        }
    }

    /// Column width in characters.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Pad `value` with spaces to the column width. Longer values are kept whole.
    pub fn pad(&self, value: &str) -> String {
        let width = self.width;

        if self.right_aligned {
            format!("{value:>width$}")
        } else {
            format!("{value:<width$}")
        }
    }
}

/// One row of an invoice, in the order it is printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceRow {
    /// Horizontal rule
    Separator,

    /// Column titles
    Header,

    /// A cart line at full price
    Item {
        /// Product name
        name: String,

        /// Units bought
        quantity: u32,

        /// Price before the promotion
        price: Decimal,
    },

    /// The promotion discount of the cart line above
    Promotion {
        /// Promotion summary
        description: String,

        /// Amount taken off
        discount: Decimal,
    },

    /// The coupon discount on the whole cart
    Coupon {
        /// Coupon name
        name: String,

        /// Coupon summary
        description: String,

        /// Amount taken off
        discount: Decimal,
    },

    /// Amount owed
    Total {
        /// Final total
        total: Decimal,
    },
}

impl InvoiceRow {
    /// Name, quantity and price cell text, unpadded. `None` for separators.
    pub fn cells(&self) -> Option<[String; 3]> {
        let cells = match self {
            InvoiceRow::Separator => return None,
            InvoiceRow::Header => ["Name".into(), "qty".into(), "price".into()],
            InvoiceRow::Item {
                name,
                quantity,
                price,
            } => [name.clone(), quantity.to_string(), format_amount(*price)],
            InvoiceRow::Promotion {
                description,
                discount,
            } => [
                format!("  ({description})"),
                String::new(),
                format!("-{}", format_amount(*discount)),
            ],
            InvoiceRow::Coupon {
                name,
                description,
                discount,
            } => [
                format!("Coupon {name} - {description}"),
                String::new(),
                format!("-{}", format_amount(*discount)),
            ],
            InvoiceRow::Total { total } => ["TOTAL".into(), String::new(), format_amount(*total)],
        };

        Some(cells)
    }

    /// The printed line, without a trailing newline.
    ///
    /// Every cell is padded to its own column, so an overlong cell only widens its own line.
    pub fn line(&self) -> String {
        match self.cells() {
            Some([name, quantity, price]) => format!(
                "| {}  {} | {} |",
                NAME_COLUMN.pad(&name),
                QUANTITY_COLUMN.pad(&quantity),
                PRICE_COLUMN.pad(&price)
            ),
            None => SEPARATOR.to_string(),
        }
    }
}

/// Invoice for a cart, as an ordered list of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    rows: SmallVec<[InvoiceRow; 16]>,
}

impl Invoice {
    /// Build the invoice rows for `cart`.
    ///
    /// Each cart line is followed by its promotion row when the promotion discounts it, and
    /// the coupon row follows the last line when the coupon discounts the cart.
    pub fn from_cart(cart: &Cart<'_>) -> Self {
        let mut rows: SmallVec<[InvoiceRow; 16]> =
            smallvec![InvoiceRow::Separator, InvoiceRow::Header, InvoiceRow::Separator];

        for item in cart.items() {
            let product = item.product();

            rows.push(InvoiceRow::Item {
                name: product.name().to_string(),
                quantity: item.quantity(),
                price: item.price_without_discount(),
            });

            let discount = item.discount();

            if !discount.is_zero() {
                rows.push(InvoiceRow::Promotion {
                    description: product
                        .promotion()
                        .description()
                        .unwrap_or_else(|| UNKNOWN_PROMOTION.to_string()),
                    discount,
                });
            }
        }

        let coupon_discount = cart.coupon_discount();

        if !coupon_discount.is_zero() {
            let coupon = cart.coupon();

            rows.push(InvoiceRow::Coupon {
                name: coupon.name().to_string(),
                description: coupon
                    .description()
                    .unwrap_or_else(|| UNKNOWN_COUPON.to_string()),
                discount: coupon_discount,
            });
        }

        rows.push(InvoiceRow::Separator);
        rows.push(InvoiceRow::Total {
            total: cart.total(),
        });
        rows.push(InvoiceRow::Separator);

        Invoice { rows }
    }

    /// Rows in print order.
    pub fn rows(&self) -> &[InvoiceRow] {
        &self.rows
    }

    /// Lay the rows out as a table, one line per row, ending in a newline.
    pub fn render(&self) -> String {
        let mut rendered = String::new();

        for row in &self.rows {
            rendered.push_str(&row.line());
            rendered.push('\n');
        }

        rendered
    }

    /// Writes the rendered invoice.
    ///
    /// # Errors
    ///
    /// Returns [`InvoiceError::IO`] if the invoice cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), InvoiceError> {
        for row in &self.rows {
            writeln!(out, "{}", row.line())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        coupons::Coupon,
        errors::ValidationError,
        inventory::Inventory,
        promotions::{Promotion, get_one_free::GetOneFree, threshold::Threshold},
    };

    use super::*;

    fn test_inventory() -> Result<Inventory, ValidationError> {
        let mut inventory = Inventory::new();

        inventory.register("Apple", "1.00", Promotion::None)?;
        inventory.register("Green Tea", "0.79", GetOneFree::new(3)?.into())?;
        inventory.register(
            "Earl Grey",
            "1.99",
            Threshold::new(2, Decimal::new(10, 0))?.into(),
        )?;
        inventory.register_coupon(Coupon::percent("TEATIME", Decimal::new(20, 0))?);

        Ok(inventory)
    }

    #[test]
    fn column_pads_to_width() {
        assert_eq!(NAME_COLUMN.pad("Apple").len(), 40);
        assert_eq!(QUANTITY_COLUMN.pad("3"), "   3");
        assert_eq!(PRICE_COLUMN.pad("3.00"), "    3.00");
        assert_eq!(Column::left(3).pad("toolong"), "toolong");
    }

    #[test]
    fn empty_cart_has_header_and_total_only() -> TestResult {
        let inventory = test_inventory()?;
        let cart = inventory.new_cart();

        let invoice = Invoice::from_cart(&cart);

        assert_eq!(
            invoice.rows(),
            [
                InvoiceRow::Separator,
                InvoiceRow::Header,
                InvoiceRow::Separator,
                InvoiceRow::Separator,
                InvoiceRow::Total {
                    total: Decimal::ZERO
                },
                InvoiceRow::Separator,
            ]
        );

        Ok(())
    }

    #[test]
    fn promotion_row_follows_discounted_item() -> TestResult {
        let inventory = test_inventory()?;
        let mut cart = inventory.new_cart();

        cart.add("Green Tea", 3)?;
        cart.add("Apple", 1)?;

        let invoice = Invoice::from_cart(&cart);
        let rows = invoice.rows();

        assert_eq!(
            rows.get(3..6),
            Some(
                &[
                    InvoiceRow::Item {
                        name: "Green Tea".into(),
                        quantity: 3,
                        price: Decimal::new(237, 2),
                    },
                    InvoiceRow::Promotion {
                        description: "buy 2, get 1 free".into(),
                        discount: Decimal::new(79, 2),
                    },
                    InvoiceRow::Item {
                        name: "Apple".into(),
                        quantity: 1,
                        price: Decimal::new(1, 0),
                    },
                ][..]
            )
        );

        Ok(())
    }

    #[test]
    fn no_promotion_row_while_below_threshold() -> TestResult {
        let inventory = test_inventory()?;
        let mut cart = inventory.new_cart();

        cart.add("Earl Grey", 2)?;

        let invoice = Invoice::from_cart(&cart);

        assert!(
            !invoice
                .rows()
                .iter()
                .any(|row| matches!(row, InvoiceRow::Promotion { .. })),
            "threshold not reached, no promotion row expected"
        );

        Ok(())
    }

    #[test]
    fn coupon_row_comes_after_items_and_before_total() -> TestResult {
        let inventory = test_inventory()?;
        let mut cart = inventory.new_cart();

        cart.add("Apple", 5)?;
        cart.use_coupon("TEATIME")?;

        let invoice = Invoice::from_cart(&cart);

        assert_eq!(
            invoice.rows().get(4..7),
            Some(
                &[
                    InvoiceRow::Coupon {
                        name: "TEATIME".into(),
                        description: "20% off".into(),
                        discount: Decimal::new(1, 0),
                    },
                    InvoiceRow::Separator,
                    InvoiceRow::Total {
                        total: Decimal::new(4, 0)
                    },
                ][..]
            )
        );

        Ok(())
    }

    #[test]
    fn cells_format_prices_with_two_decimals() {
        let promotion = InvoiceRow::Promotion {
            description: "50% off of every after the 10th".into(),
            discount: Decimal::new(5, 1),
        };

        assert_eq!(
            promotion.cells(),
            Some([
                "  (50% off of every after the 10th)".to_string(),
                String::new(),
                "-0.50".to_string(),
            ])
        );
        assert_eq!(InvoiceRow::Separator.cells(), None);
    }

    #[test]
    fn separator_spans_both_blocks() {
        assert_eq!(SEPARATOR.len(), 61);
        assert_eq!(InvoiceRow::Separator.line(), SEPARATOR);
        assert_eq!(InvoiceRow::Header.line().len(), SEPARATOR.len());
    }

    #[test]
    fn wide_total_only_widens_its_own_line() -> TestResult {
        let mut inventory = Inventory::new();

        inventory.register("A", "999.99", Promotion::None)?;
        inventory.register("B", "999.99", Promotion::None)?;

        let mut cart = inventory.new_cart();

        cart.add("A", 99)?;
        cart.add("B", 99)?;

        let rendered = Invoice::from_cart(&cart).render();
        let total_line = format!("| {:<40}  {:>4} | 197998.02 |", "TOTAL", "");

        for line in rendered.lines() {
            if line == total_line {
                continue;
            }

            assert_eq!(line.len(), 61, "line should keep its width: {line:?}");
        }

        assert!(
            rendered.contains(&format!("\n{total_line}\n")),
            "total line expected in {rendered}"
        );
        assert!(
            rendered.contains("| Name                                       qty |    price |\n"),
            "header keeps its width"
        );

        Ok(())
    }

    #[test]
    fn long_coupon_name_only_widens_its_own_line() -> TestResult {
        let mut inventory = test_inventory()?;

        inventory.register_coupon(Coupon::percent(
            "SUPER-LONG-SUMMER-SALE-CODE",
            Decimal::new(20, 0),
        )?);

        let mut cart = inventory.new_cart();

        cart.add("Apple", 3)?;
        cart.use_coupon("SUPER-LONG-SUMMER-SALE-CODE")?;

        let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
| Apple                                        3 |     3.00 |
| Coupon SUPER-LONG-SUMMER-SALE-CODE - 20% off       |    -0.60 |
+------------------------------------------------+----------+
| TOTAL                                          |     2.40 |
+------------------------------------------------+----------+
";

        assert_eq!(Invoice::from_cart(&cart).render(), expected);

        Ok(())
    }

    #[test]
    fn render_lays_out_fixed_width_table() -> TestResult {
        let inventory = test_inventory()?;
        let mut cart = inventory.new_cart();

        cart.add("Apple", 3)?;

        let expected = "\
+------------------------------------------------+----------+
| Name                                       qty |    price |
+------------------------------------------------+----------+
| Apple                                        3 |     3.00 |
+------------------------------------------------+----------+
| TOTAL                                          |     3.00 |
+------------------------------------------------+----------+
";

        assert_eq!(Invoice::from_cart(&cart).render(), expected);

        Ok(())
    }

    #[test]
    fn write_to_writes_rendered_invoice() -> TestResult {
        let inventory = test_inventory()?;
        let mut cart = inventory.new_cart();
        cart.add("Green Tea", 4)?;

        let invoice = Invoice::from_cart(&cart);
        let mut out = Vec::new();

        invoice.write_to(&mut out)?;

        assert_eq!(String::from_utf8(out)?, invoice.render());

        Ok(())
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_to_keeps_the_io_error() -> TestResult {
        let inventory = test_inventory()?;
        let cart = inventory.new_cart();

        let result = Invoice::from_cart(&cart).write_to(ClosedPipe);

        assert!(matches!(
            result,
            Err(InvoiceError::IO(err)) if err.kind() == io::ErrorKind::BrokenPipe
        ));

        Ok(())
    }
}
