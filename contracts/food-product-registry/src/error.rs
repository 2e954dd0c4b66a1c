use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,
    NotOwner = 4,

    // Lookup errors
    ProductNotFound = 5,

    // Validation errors
    InvalidArgument = 6,
    InvalidScore = 7,
    EmptyBatch = 8,

    // Transfer errors
    InvalidRecipient = 9,

    // Status errors
    InvalidTransition = 10,
    TerminalStatus = 11,
    NoStatusChange = 12,
}
