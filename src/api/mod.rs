pub mod otp;
mod response;
