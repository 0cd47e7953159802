use crate::errors::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowCtrl {
    Continue,
    Finish,
    Abort,
}

pub trait Flow {
    fn render(&mut self) -> Result<()>;
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl>;
}

impl<F: Flow + ?Sized> Flow for &mut F {
    fn render(&mut self) -> Result<()> {
        (**self).render()
    }
    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        (**self).handle_input(input)
    }
}

/// Steps of the booking confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    AskCustomer, // name is required
    AskDescription,
    Done,
}
