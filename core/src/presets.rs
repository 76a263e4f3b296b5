#![deny(missing_docs)]

//! # Presets
//!
//! The built-in rewrite for the payment page: cart-aware booking validation.
//!
//! Before the rewrite the page always validated the single ("long") booking,
//! even when the cart held several quotes. Afterwards the single booking is
//! only validated for carts with fewer than two items; larger carts validate
//! the contact name, phone and email instead.

use crate::error::AppResult;
use crate::patcher::Patch;

/// File the preset is written against, relative to the web app root.
pub const DEFAULT_TARGET: &str = "app/pago/page.tsx";

/// Matches the unconditional `validateSingleBooking` block, whitespace included.
pub const BOOKING_VALIDATION_PATTERN: &str = r#"    // 1\) Si hay 2\+ cotizaciones, valida el carrito
    if \(cartLen >= 2\) \{
      reasons\.push\(\.\.\.validateCartItems\(carritoState\)\);
    \}

    // 2\) Valida siempre la cotización actual \(la "larga"\)
    reasons\.push\(
      \.\.\.validateSingleBooking\(
        bookingData,
        paymentPickupAddress,
        paymentDropoffAddress
      \)
    \);"#;

/// Replaces the block with the cart-size branch.
pub const BOOKING_VALIDATION_REPLACEMENT: &str = r#"    // 1) Si hay 2+ cotizaciones, valida el carrito
    if (cartLen >= 2) {
      reasons.push(...validateCartItems(carritoState));
      
      // Validar información de contacto (que siempre existe)
      const bd = bookingData || {};
      if (!String(bd.contactName || "").trim())
        reasons.push(pageTexts.v_fullName);
      if (!String(bd.contactPhone || "").trim())
        reasons.push(pageTexts.v_validPhone);
      const email = String(bd.contactEmail || "");
      if (!email.trim()) {
        reasons.push(pageTexts.v_validEmail);
      } else {
        const emailRegex = /^[^\s@]+@[^\s@]+\.[^\s@]{2,}$/;
        if (!emailRegex.test(email))
          reasons.push(pageTexts.invalidFormat);
      }
    } else {
      // 2) Si hay 0-1 cotizaciones, valida la cotización actual (la "larga")
      reasons.push(
        ...validateSingleBooking(
          bookingData,
          paymentPickupAddress,
          paymentDropoffAddress
        )
      );
    }"#;

/// Compiles the booking validation preset.
pub fn booking_validation() -> AppResult<Patch> {
    Patch::new(BOOKING_VALIDATION_PATTERN, BOOKING_VALIDATION_REPLACEMENT)
}
