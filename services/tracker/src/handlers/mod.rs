pub mod projet;
pub mod tache;
pub mod utilisateur;
