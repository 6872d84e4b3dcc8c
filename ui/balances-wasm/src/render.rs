//! Token row rendering.
//!
//! The list is rebuilt wholesale on each refresh: no diffing, no identity
//! across renders. Class names are part of the page contract and are also
//! what the token selector matches on.

use crate::dom;
use crate::state;
use tl_balance_core::format::{format_quantity_short, shorten_address};
use tl_balance_core::token::Token;
use web_sys::Element;

/// Append one rendered row for `token` to the list container.
pub fn append_token_row(list: &Element, token: &Token) {
    let chain = state::chain_id();
    let resolved = token.addresses.resolve(chain);

    let href = match (resolved, state::explorer_url()) {
        (Some(address), Some(explorer)) => format!("{explorer}/token/{address}"),
        _ => "#".to_owned(),
    };
    let address_label = if token.addresses.is_native() {
        "...".to_owned()
    } else {
        shorten_address(resolved)
    };

    let row = dom::create_element("div");
    dom::set_inner_html(
        &row,
        &format!(
            r#"
    <div class="d-flex align-items-center mb-3">
      <img src="{image}" alt="" width="40" style="padding-left: 10px;">
      <div class="d-flex align-items-center flex-column">
        <div class="d-flex flex-row crypto-items">
          <span class="span-crypto-name">{symbol}</span>
          <span class="span-crypto-name2">{long_name}</span>
        </div>
        <div class="d-flex flex-column">
          <a class="crypto-a textDecoration" href="{href}" target="_blank" rel="noreferrer">{address_label}</a>
          <span class="card-smallText_selectToken">Arbed Uniswap List and 2 more lists</span>
        </div>
      </div>
      <span class="span-cost">{quantity} {symbol}</span>
    </div>
  "#,
            image = token.image,
            symbol = token.symbol,
            long_name = token.long_name,
            quantity = format_quantity_short(&token.quantity),
        ),
    );

    // The wrapper div exists only to parse the markup; append its child.
    if let Some(inner) = row.first_element_child() {
        list.append_child(&inner).unwrap();
    }
}
