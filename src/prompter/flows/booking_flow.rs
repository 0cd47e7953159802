use crate::core::context::AppContext;
use crate::core::models::Selection;
use crate::errors::{Error, Result};
use crate::logging::{LogEvent, LogTarget};
use crate::prompter::models::{BookingState, FlowCtrl};
use crate::ui::display_manager::DisplayManager;

const CANCEL: &str = "cancel";

/// Confirmation dialog for one selection. Driven line by line by the main
/// flow, which owns the context.
#[derive(Debug, Clone)]
pub struct BookingFlow {
    selection: Selection,
    state: BookingState,
    customer: Option<String>,
    summary_shown: bool,
}

impl BookingFlow {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            state: BookingState::AskCustomer,
            customer: None,
            summary_shown: false,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.state {
            BookingState::AskCustomer => "Customer name: ",
            BookingState::AskDescription => "Job description (optional): ",
            BookingState::Done => "",
        }
    }

    pub fn render(&mut self, dm: &DisplayManager) {
        if !self.summary_shown {
            dm.display_selection(&self.selection);
            println!("Type '{CANCEL}' to close without booking.");
            self.summary_shown = true;
        }
    }

    /// `Continue` while the dialog stays open, `Finish` once booked, `Abort`
    /// when cancelled or the slot was lost.
    pub fn handle_input(&mut self, ctx: &mut AppContext, input: &str) -> Result<FlowCtrl> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(CANCEL) {
            self.state = BookingState::Done;
            if ctx.session.cancel_booking().is_some() {
                ctx.logger.record(&LogEvent::SelectionCleared {
                    reason: "booking cancelled",
                });
            }
            ctx.logger.info("Booking cancelled.", LogTarget::ConsoleOnly);
            return Ok(FlowCtrl::Abort);
        }

        match self.state {
            BookingState::AskCustomer => {
                if input.is_empty() {
                    ctx.logger
                        .warn("Customer name is required.", LogTarget::ConsoleOnly);
                    return Ok(FlowCtrl::Continue);
                }
                self.customer = Some(input.to_string());
                self.state = BookingState::AskDescription;
                Ok(FlowCtrl::Continue)
            }
            BookingState::AskDescription => {
                let customer = self.customer.clone().unwrap_or_default();
                let description = (!input.is_empty()).then_some(input);
                self.state = BookingState::Done;
                self.confirm(ctx, &customer, description)
            }
            BookingState::Done => Ok(FlowCtrl::Finish),
        }
    }

    fn confirm(
        &mut self,
        ctx: &mut AppContext,
        customer: &str,
        description: Option<&str>,
    ) -> Result<FlowCtrl> {
        match ctx.session.confirm(customer, description, &mut ctx.ledger) {
            Ok(booking) => {
                ctx.logger.record(&LogEvent::BookingConfirmed {
                    id: booking.id.clone(),
                    customer: booking.customer_name.clone(),
                    when: format!(
                        "{} {} {}",
                        booking.day,
                        booking.date.format("%Y-%m-%d"),
                        booking.time_label()
                    ),
                    hours: booking.duration.to_string(),
                });
                ctx.logger.info(
                    format!(
                        "Booking confirmed for {} on {}, {}.",
                        booking.customer_name,
                        booking.date.format("%A, %B %-d"),
                        booking.time_label()
                    ),
                    LogTarget::ConsoleOnly,
                );
                Ok(FlowCtrl::Finish)
            }
            Err(err @ Error::SlotUnavailable { .. }) => {
                ctx.session.clear_selection();
                ctx.logger.error(err.to_string(), LogTarget::ConsoleAndFile);
                Ok(FlowCtrl::Abort)
            }
            Err(err) => Err(err),
        }
    }
}
