mod effective_role;
mod priority;
mod role;
mod status;
